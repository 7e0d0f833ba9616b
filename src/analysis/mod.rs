pub(crate) mod average;
pub(crate) mod curve;
pub(crate) mod histogram;
pub(crate) mod spline;
