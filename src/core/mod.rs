pub mod countdown;
pub mod dispatcher;
pub mod parse;
