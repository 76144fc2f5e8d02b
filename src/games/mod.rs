pub mod sea_of_thieves;
