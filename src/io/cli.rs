//! Command-line interface for batch compiling tile catalogs into LP models

use crate::compiler::compile::ExclusionScope;
use crate::io::catalog::Catalog;
use crate::io::configuration::{
    CATALOG_EXTENSION, DEFAULT_SEED, LP_EXTENSION, OUTPUT_SUFFIX, SOLUTION_EXTENSION,
};
use crate::io::error::{Result, TileError, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::solution_file::read_solution;
use crate::model::lp::write_lp;
use crate::model::objective::Objective;
use crate::solution::render::{export_grid_as_png, render_text};
use crate::solution::solver::verified_grid;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "tileilp")]
#[command(
    author,
    version,
    about = "Compile tile catalogs into binary integer programs"
)]
/// Command-line arguments for the catalog compiler
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Catalog JSON file or directory of catalogs to compile
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Seed for the random objective
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Replace each catalog's objective with seeded random tile costs
    #[arg(short = 'r', long)]
    pub random_objective: bool,

    /// Apply exclusion rules across the whole board instead of per cell
    #[arg(short, long)]
    pub board_exclusion: bool,

    /// Render <catalog>.sol solutions found next to catalogs
    #[arg(short = 'R', long)]
    pub render: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Compile catalogs even if their LP model exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch compilation of catalog files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, compilation or output fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if has_extension(&self.cli.target, CATALOG_EXTENSION) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a JSON catalog",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            let entries = std::fs::read_dir(&self.cli.target).map_err(|e| TileError::FileSystem {
                path: self.cli.target.clone(),
                operation: "read directory",
                source: e,
            })?;
            for entry in entries {
                let path = entry?.path();
                if has_extension(&path, CATALOG_EXTENSION) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a JSON catalog or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_model_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for skipped catalogs
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (model exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    // Allow print for user feedback for missing solution file
    #[allow(clippy::print_stderr)]
    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let mut problem = Catalog::from_path(input_path)?.into_problem()?;
        if self.cli.random_objective {
            problem.options.objective = Objective::Random {
                seed: self.cli.seed,
            };
        }
        if self.cli.board_exclusion {
            problem.options.exclusion_scope = ExclusionScope::Board;
        }

        let model = {
            let progress = &mut self.progress_manager;
            problem.compile_observed(|stage| {
                if let Some(pm) = progress.as_mut() {
                    pm.update_stage(index, stage);
                }
            })?
        };

        write_lp(&model, &Self::get_model_path(input_path))?;

        if self.cli.render {
            let solution_path = Self::get_solution_path(input_path);
            if solution_path.exists() {
                let assignment = read_solution(model.cube(), &solution_path)?;
                let grid = verified_grid(&assignment, &model)?;

                let image_path = Self::get_result_path(input_path, "png");
                export_grid_as_png(&grid, &problem.palette, &image_path)?;

                let text_path = Self::get_result_path(input_path, "txt");
                std::fs::write(&text_path, render_text(&grid)).map_err(|e| {
                    TileError::FileSystem {
                        path: text_path.clone(),
                        operation: "write rendered grid",
                        source: e,
                    }
                })?;
            } else if !self.cli.quiet {
                eprintln!(
                    "No solution found at: {} (skipping render)",
                    solution_path.display()
                );
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(())
    }

    /// Path of the LP model written for a catalog
    pub fn get_model_path(input_path: &Path) -> PathBuf {
        input_path.with_extension(LP_EXTENSION)
    }

    /// Path of the solver solution read back for a catalog
    pub fn get_solution_path(input_path: &Path) -> PathBuf {
        input_path.with_extension(SOLUTION_EXTENSION)
    }

    /// Path of a rendered result with the given extension
    pub fn get_result_path(input_path: &Path, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(extension)
}
