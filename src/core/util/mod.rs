pub mod plane_mapper;
