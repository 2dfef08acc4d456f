pub mod ofdm_parameters;
pub mod ofdm_symbol_synthesiser;
