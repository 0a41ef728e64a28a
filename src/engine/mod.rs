pub(crate) mod context;
pub(crate) mod events;
pub(crate) mod instance;
pub(crate) mod options;
pub(crate) mod registry;
