mod dig;
mod end_to_end;
mod ping;
mod traceroute;
