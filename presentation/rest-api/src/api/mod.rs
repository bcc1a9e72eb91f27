pub mod error;
pub mod tags;

pub mod health {
    pub mod routes;
}

pub mod bin {
    pub mod dto;
    pub mod routes;
}

pub mod logo {
    pub mod dto;
    pub mod error_mapper;
    pub mod proxy;
    pub mod routes;
}
