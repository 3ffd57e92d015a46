pub mod hard_limiter;
