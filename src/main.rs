fn main() {
    blaster_gallery::game::run();
}
