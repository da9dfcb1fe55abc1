mod cache;
mod calc;
mod mapper;
mod utils;
