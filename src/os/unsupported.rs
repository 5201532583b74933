use std::io;

pub(crate) fn sys_random(_buf: &mut [u8]) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "no operating system entropy source on this platform",
    ))
}
