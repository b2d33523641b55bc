mod loading;
mod runner;
