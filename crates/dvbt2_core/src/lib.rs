//! Shared configuration, parameter tables and errors for the DVB-T2 transmit blocks.
pub mod dvbt2_config;
pub mod dvbt2_error;
pub mod dvbt2_parameters;
