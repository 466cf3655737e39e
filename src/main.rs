/*
 * Nanoswarm
 *
 * An interactive 3D particle swarm. Particles drift on a noise field, chase
 * the pointer, keep their distance from each other, and can be locked into
 * formations (sphere, cube, helix, ring, heart) with selectable color
 * themes. All tuning happens live through the on-screen controls.
 */

use nanoswarm::app;

fn main() {
    nannou::app(app::model).update(app::update).run();
}
