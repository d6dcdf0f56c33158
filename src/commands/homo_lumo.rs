//! # homo-lumo 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/bands.rs` 定义的 HomoLumoArgs
//! - 使用 `bandana::parsers::homo_lumo`

use crate::cli::bands::HomoLumoArgs;
use crate::utils::output;
use bandana::error::Result;
use bandana::parsers::parse_homo_lumo_file;

/// 执行 homo-lumo 命令
pub fn execute(args: HomoLumoArgs) -> Result<()> {
    let indices = parse_homo_lumo_file(&args.input)?;

    output::print_info(&format!(
        "First empty state: {}",
        indices.first_empty_state
    ));
    output::print_success(&format!(
        "HOMO column: {}, LUMO column: {}",
        indices.homo, indices.lumo
    ));

    Ok(())
}
