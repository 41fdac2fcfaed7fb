mod layered_error;
mod outcome;
