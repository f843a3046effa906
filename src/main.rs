fn main() {
    voxel_sweep::sim::run();
}
