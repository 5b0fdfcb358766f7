//! Implementation of the `qnn-options check` command.

use crate::cli::CheckArgs;
use qnn_options::Result;
use qnn_options::validate::validate_document;

pub fn cmd_check(args: &CheckArgs) -> Result<String> {
    validate_document(&args.document)?;
    Ok("ok".to_string())
}
