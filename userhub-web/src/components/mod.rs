pub(crate) mod confirm_modal;
pub(crate) mod loading;
pub(crate) mod navbar;
pub(crate) mod pagination;
