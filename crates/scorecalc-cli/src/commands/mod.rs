pub mod act;
pub mod compare;
pub mod init;
pub mod run;
pub mod sat;
pub mod sections;
pub mod validate;
