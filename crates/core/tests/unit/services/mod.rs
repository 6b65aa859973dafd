/// Floating-point CSR adapter.
pub mod fp_csr;
