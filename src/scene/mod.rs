pub(crate) mod eval;
pub(crate) mod model;
pub(crate) mod timeline;
