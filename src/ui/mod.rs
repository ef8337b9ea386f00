pub mod flow;
pub mod prompts;
pub mod style;
pub mod view;
