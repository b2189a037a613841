//! CPLEX LP text export, readable by SCIP, CBC, HiGHS, GLPK and Gurobi

use crate::compiler::compile::CompiledModel;
use crate::io::error::{Result, TileError};
use crate::model::cube::DecisionCube;
use crate::model::expression::LinearExpr;
use std::fmt::Write as _;
use std::path::Path;

// LP readers cap line length, so long rows are wrapped
const TERMS_PER_LINE: usize = 8;

fn write_expr(out: &mut String, expr: &LinearExpr, cube: &DecisionCube) {
    for (position, (variable, coefficient)) in expr.terms().iter().enumerate() {
        if position > 0 && position % TERMS_PER_LINE == 0 {
            out.push_str("\n   ");
        }
        let name = cube.name(*variable).unwrap_or_default();
        let magnitude = coefficient.unsigned_abs();
        if position == 0 && *coefficient >= 0 {
            let _ = write!(out, "{magnitude} {name}");
        } else {
            let sign = if *coefficient < 0 { '-' } else { '+' };
            let _ = write!(out, " {sign} {magnitude} {name}");
        }
    }
}

/// Render a compiled model in CPLEX LP format
///
/// The objective is minimised; feasibility models get an all-zero objective
/// on the first variable. Every cube variable is declared binary.
pub fn to_lp_string(model: &CompiledModel) -> String {
    let cube = model.cube();
    let mut out = String::from("\\ tile placement model\nMinimize\n obj: ");

    match model.objective() {
        Some(objective) if !objective.is_empty() => write_expr(&mut out, objective, cube),
        _ => {
            if let Some(name) = cube.variable(0, 0, 0).and_then(|v| cube.name(v)) {
                let _ = write!(out, "0 {name}");
            }
        }
    }

    out.push_str("\nSubject To\n");
    for constraint in model.constraints() {
        let _ = write!(out, " {}: ", constraint.name);
        if constraint.expr.is_empty() {
            if let Some(name) = cube.variable(0, 0, 0).and_then(|v| cube.name(v)) {
                let _ = write!(out, "0 {name}");
            }
        } else {
            write_expr(&mut out, &constraint.expr, cube);
        }
        let _ = writeln!(out, " {} {}", constraint.comparison, constraint.bound);
    }

    out.push_str("Binary\n");
    for variable in cube.iter() {
        if let Some(name) = cube.name(variable) {
            let _ = writeln!(out, " {name}");
        }
    }
    out.push_str("End\n");
    out
}

/// Write a compiled model to an LP file
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written
pub fn write_lp(model: &CompiledModel, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| TileError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(path, to_lp_string(model)).map_err(|e| TileError::FileSystem {
        path: path.to_path_buf(),
        operation: "write LP model",
        source: e,
    })
}
