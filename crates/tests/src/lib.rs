#[cfg(test)]
mod common;

#[cfg(test)]
mod visibility_scenario_tests;

#[cfg(test)]
mod visibility_property_tests;

#[cfg(test)]
mod summary_tests;


#[cfg(test)]
mod case_source_tests;

#[cfg(test)]
mod config_tests;
