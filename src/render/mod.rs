pub(crate) mod cpu;
pub(crate) mod frame;
pub(crate) mod label;
pub(crate) mod pipeline;
pub(crate) mod svg;
