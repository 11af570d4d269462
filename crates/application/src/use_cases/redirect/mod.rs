pub mod check_redirect;
pub mod plan_protocol_redirect;

pub use check_redirect::CheckRedirectUseCase;
pub use plan_protocol_redirect::PlanProtocolRedirectUseCase;
