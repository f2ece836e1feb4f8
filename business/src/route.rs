//! Which grid page the app shows.

use griddle_states::State;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Cars,
    Employees,
}

impl Route {
    pub const ALL: [Self; 2] = [Self::Cars, Self::Employees];

    pub fn title(self) -> &'static str {
        match self {
            Self::Cars => "Cars",
            Self::Employees => "Employees",
        }
    }
}

impl State for Route {}
