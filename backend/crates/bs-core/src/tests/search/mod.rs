mod search_proxy;
