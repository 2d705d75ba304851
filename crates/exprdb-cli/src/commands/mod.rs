pub mod dispatch;
pub mod entropy;
pub mod feature;
pub mod init;
pub mod link;
pub mod xrefs;
