mod region_tests;
mod cropper_tests;
