pub mod fft {
    pub mod dft;
    pub mod fft_recursive;
}
pub mod utils {
    pub mod complex;
}
