/// Blocking user prompts used by the panel operations.
///
/// The terminal front end renders these as modal dialogs, the CLI uses
/// stdout/stdin, and tests script the answers.
pub trait Dialogs {
    /// Show a message and wait until the user acknowledges it.
    fn alert(&mut self, message: &str);

    /// Ask a yes/no question. Returns true only on an explicit yes.
    fn confirm(&mut self, message: &str) -> bool;
}
