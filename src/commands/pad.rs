//! # pad 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/pad.rs` 定义的参数
//! - 使用 `bandana::padding`, `bandana::parsers::bands::load_table`, `bandana::export`

use crate::cli::pad::PadArgs;
use crate::utils::output;
use bandana::error::Result;
use bandana::export;
use bandana::padding::sympad;
use bandana::parsers::bands::load_table;

/// 执行 pad 命令
pub fn execute(args: PadArgs) -> Result<()> {
    let matrix = load_table(&args.input)?;
    let pads = args.pad_width();

    let padded = sympad(matrix.view(), pads, args.mode.into(), args.reflect.into())?;

    output::print_success(&format!(
        "Padded {:?} -> {:?} ({:?}, {:?})",
        matrix.dim(),
        padded.dim(),
        args.mode,
        args.reflect
    ));

    export::write_matrix(&padded, &args.output)?;
    output::print_written("Padded matrix", &args.output.display().to_string());

    Ok(())
}
