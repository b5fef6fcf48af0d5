mod logic;
mod mask_ops;
mod misc;
mod shuffle;
