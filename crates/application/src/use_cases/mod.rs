pub mod redirect;

pub use redirect::{CheckRedirectUseCase, PlanProtocolRedirectUseCase};
