pub mod dice_sets;
