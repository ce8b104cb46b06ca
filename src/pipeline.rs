use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::debug;

use crate::canvas::Canvas;

/// Debug configuration for pipeline execution
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Root directory for debug outputs
    pub output_dir: PathBuf,
    /// Whether debug mode is enabled
    pub enabled: bool,
}

impl DebugConfig {
    /// Enabled debug output into `output_dir`.
    /// The directory must be empty or non-existent
    pub fn prepare(output_dir: PathBuf) -> Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(anyhow::anyhow!(
                    "Debug directory is not empty: {}",
                    output_dir.display()
                ));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        Ok(Self {
            output_dir,
            enabled: true,
        })
    }
}

/// Context available to all pipeline steps
#[derive(Clone, Debug, Default)]
pub struct PipelineContext {
    pub verbose: bool,
    pub debug: Option<DebugConfig>,
}

impl PipelineContext {
    /// Context whose debug outputs go to a subdirectory named after one banner
    pub fn scoped(&self, name: &str) -> Result<PipelineContext> {
        let mut scoped = self.clone();
        if let Some(debug_config) = scoped.debug.as_mut() {
            debug_config.output_dir = debug_config.output_dir.join(name);
            if debug_config.enabled {
                std::fs::create_dir_all(&debug_config.output_dir)?;
            }
        }
        Ok(scoped)
    }

    /// Save an intermediate canvas as `<stem>.png` in the debug directory
    fn save_debug_output(&self, canvas: &Canvas, stem: &str) -> Result<()> {
        let Some(debug_config) = &self.debug else {
            return Ok(());
        };
        if !debug_config.enabled {
            return Ok(());
        }

        let filename = format!("{}.png", stem);
        let output_path = debug_config.output_dir.join(&filename);
        canvas
            .save_png(&output_path)
            .with_context(|| format!("Failed to save debug image {}", output_path.display()))?;

        if self.verbose {
            println!("  Debug: saved {}", filename);
        }
        Ok(())
    }
}

/// One drawing operation over the shared canvas
pub trait PipelineStep: Send + Sync {
    /// Draw into the canvas and hand it on to the next step
    fn process(&self, canvas: Canvas, context: &PipelineContext) -> Result<Canvas>;

    /// Human-readable name for this step (used in verbose output)
    fn name(&self) -> &str;
}

/// Debug file stem for a step, e.g. "03_field_rows"
pub fn step_file_stem(step_index: usize, step_name: &str) -> String {
    format!(
        "{:02}_{}",
        step_index + 1,
        step_name.to_lowercase().replace([' ', '/'], "_")
    )
}

/// Composable pipeline builder
pub struct Pipeline {
    steps: Vec<Arc<dyn PipelineStep>>,
    context: PipelineContext,
}

impl Pipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            context: PipelineContext::default(),
        }
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.context.verbose = verbose;
        self
    }

    /// Enable debug mode with output directory
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, output_dir: PathBuf) -> Result<Self> {
        self.context.debug = Some(DebugConfig::prepare(output_dir)?);
        Ok(self)
    }

    /// Share an already configured context (verbose flag and debug directory)
    pub fn with_pipeline_context(mut self, context: PipelineContext) -> Self {
        self.context = context;
        self
    }

    /// Add a processing step to the pipeline
    pub fn add_step(mut self, step: Arc<dyn PipelineStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Helper method to add a step from a Box (for convenience)
    pub fn add_step_boxed(mut self, step: Box<dyn PipelineStep>) -> Self {
        self.steps.push(Arc::from(step));
        self
    }

    /// Names of the steps in execution order
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run every step in order on the input canvas
    pub fn run(&self, input: Canvas) -> Result<Canvas> {
        self.run_partial(input, self.steps.len())
    }

    /// Run the pipeline but stop after `num_steps` steps (useful for debugging)
    pub fn run_partial(&self, input: Canvas, num_steps: usize) -> Result<Canvas> {
        self.context.save_debug_output(&input, "00_input")?;

        let mut canvas = input;
        for (step_idx, step) in self.steps.iter().take(num_steps).enumerate() {
            let step_name = step.name();
            if self.context.verbose {
                println!("  ├─ {}", step_name);
            }
            debug!("running step {} ({})", step_idx + 1, step_name);

            canvas = step
                .process(canvas, &self.context)
                .with_context(|| format!("Step '{}' failed", step_name))?;

            self.context
                .save_debug_output(&canvas, &step_file_stem(step_idx, step_name))?;
        }

        Ok(canvas)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
