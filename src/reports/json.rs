use crate::Result;
use crate::engine::ScoreResult;
use core::fmt::Write;
use ohno::IntoAppError;

pub fn generate<W: Write>(result: &ScoreResult, writer: &mut W) -> Result<()> {
    let output = serde_json::to_string_pretty(result).into_app_err("unable to serialize score result")?;
    writeln!(writer, "{output}")?;
    Ok(())
}
