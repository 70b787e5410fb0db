pub(crate) mod cube_demo;

pub(crate) use cube_demo::cube_demo_task;
