pub mod serverlist;
