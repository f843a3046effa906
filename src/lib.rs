// ============================================
// voxel-sweep - Симуляция сущностей в воксельном мире
// ============================================
// Непрерывные коллизии AABB с сеткой блоков

pub mod sim;
