pub mod picking;
pub mod pointer;
pub mod router;
pub mod session;
