mod account_form;
