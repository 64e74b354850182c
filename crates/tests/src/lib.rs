#[cfg(test)]
mod common;

#[cfg(test)]
mod menu_resolver_tests;

#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod sidebar_tests;

#[cfg(test)]
mod view_resolver_tests;

#[cfg(test)]
mod session_scenario_tests;

#[cfg(test)]
mod config_tests;

#[cfg(test)]
mod property_tests;
