mod api_tests;
mod browse_tests;
mod detail_tests;
mod favorites_tests;
mod remote_tests;
