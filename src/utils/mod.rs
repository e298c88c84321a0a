pub mod consts;
pub mod file_utils;
