mod assets;
mod home;
mod preferences;
mod team;
mod team_data;
