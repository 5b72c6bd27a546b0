pub mod check;
pub mod init;
pub mod new;
pub mod submit;
