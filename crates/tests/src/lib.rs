#[cfg(test)]
mod common;

#[cfg(test)]
mod route_classifier_tests;

#[cfg(test)]
mod session_guard_tests;

#[cfg(test)]
mod logout_tests;

#[cfg(test)]
mod sign_in_tests;

#[cfg(test)]
mod scenario_tests;
