//! # geometry 命令实现
//!
//! 解析 geometry.in，打印晶格与原子表格，可选导出 POSCAR / CSV。
//!
//! ## 依赖关系
//! - 使用 `cli/geometry.rs` 定义的参数
//! - 使用 `bandana::parsers::{geometry, poscar}`, `bandana::export`
//! - 使用 `utils/output.rs`

use crate::cli::geometry::GeometryArgs;
use crate::utils::output;
use bandana::error::Result;
use bandana::export;
use bandana::models::Geometry;
use bandana::parsers::{parse_geometry_file, poscar};

use tabled::{Table, Tabled};

/// 原子表格行
#[derive(Tabled)]
struct AtomRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Species")]
    species: String,
    #[tabled(rename = "x")]
    x: String,
    #[tabled(rename = "y")]
    y: String,
    #[tabled(rename = "z")]
    z: String,
    #[tabled(rename = "Coordinates")]
    system: String,
}

/// 执行 geometry 命令
pub fn execute(args: GeometryArgs) -> Result<()> {
    output::print_header("Geometry");

    let geometry = parse_geometry_file(&args.input)?;

    output::print_success(&format!(
        "Loaded '{}': {} ({} lattice vectors, {} atoms)",
        args.input.display(),
        geometry.formula(),
        geometry.lattice_vectors.len(),
        geometry.atoms.len()
    ));

    if let Some(convention) = geometry.convention() {
        output::print_info(&format!("Coordinate convention: {}", convention));
    }
    if geometry.is_mixed() {
        output::print_warning(&format!(
            "File mixes atom and atom_frac records; the last record decides the convention ({} fractional, {} cartesian)",
            geometry.fractional_atoms().len(),
            geometry.cartesian_atoms().len()
        ));
    }
    if let Some(volume) = geometry.volume() {
        output::print_info(&format!("Cell volume: {:.4}", volume));
    }

    print_atom_table(&geometry);

    if let Some(path) = &args.poscar {
        let text = poscar::to_poscar_string(&geometry)?;
        export::write_text(&text, path)?;
        output::print_written("POSCAR", &path.display().to_string());
    }

    if let Some(path) = &args.csv {
        export::write_atoms_csv(&geometry, path)?;
        output::print_written("CSV", &path.display().to_string());
    }

    Ok(())
}

fn print_atom_table(geometry: &Geometry) {
    let rows: Vec<AtomRow> = geometry
        .atoms
        .iter()
        .enumerate()
        .map(|(i, a)| AtomRow {
            index: i + 1,
            species: a.species.clone(),
            x: format!("{:.6}", a.position[0]),
            y: format!("{:.6}", a.position[1]),
            z: format!("{:.6}", a.position[2]),
            system: a.system.to_string(),
        })
        .collect();

    println!("{}", Table::new(&rows));
}
