mod auth_tests;
mod chart_tests;
mod values_tests;
