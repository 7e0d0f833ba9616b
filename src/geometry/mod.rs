pub(crate) mod koch;
