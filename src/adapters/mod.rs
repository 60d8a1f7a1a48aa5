pub mod captcha;
pub mod http;
pub mod persistence;
