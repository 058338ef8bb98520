/// Common behavior for errors raised by any phase of the tin front end.
/// Errors format themselves into a message, and can emit that message
/// to stderr for display.
pub trait TinErr {
    fn emit(&self);
    fn to_msg(&self) -> String;
}
