mod accessing;
mod administration;
mod aggregation;
mod databases;
mod dates_times;
mod documents;
mod geospatial;
mod joins;
mod math_logic;
mod other;
mod selecting;
mod strings;
mod structures;
mod tables;
mod transformations;
mod writing;
