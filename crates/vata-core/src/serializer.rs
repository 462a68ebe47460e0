//! Command serializer
//!
//! Maps a [`Command`] to the argument vector `vata` expects:
//!
//! ```text
//! -r <encoding> [run flags] <operation> [-o <options>] <operand>...
//! ```

use crate::command::Command;
use crate::options::CodedEnum;

/// Flag preceding the encoding token
pub const ENCODING_FLAG: &str = "-r";
/// Flag preceding the option string
pub const OPTIONS_FLAG: &str = "-o";

/// Serialize a command into its argument vector
///
/// Pure and deterministic. Operands are emitted exactly as stored.
pub fn serialize_command(command: &Command) -> Vec<String> {
    let encoding = command.encoding();
    let mut args = vec![ENCODING_FLAG.to_string(), encoding.token().to_string()];

    args.extend(command.flags().tokens().into_iter().map(String::from));
    args.push(command.operation().token().to_string());

    if let Some(options) = command.options() {
        args.push(OPTIONS_FLAG.to_string());
        args.push(options.serialize(encoding));
    }

    args.extend(command.operands().iter().cloned());
    args
}
