// Interface adapters: render event protocol and renderer implementations.

pub mod protocol;
pub mod render;
